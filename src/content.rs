//! Everything the page says, as literal data.

/// Link value used for projects that have nothing to show yet.
pub const PLACEHOLDER_LINK: &str = "#";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileLink {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub tagline: &'static str,
    pub bio: &'static [&'static str],
    pub email: &'static str,
    pub phone: &'static str,
    pub linkedin: ProfileLink,
    pub github: ProfileLink,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillEntry {
    pub skill: &'static str,
    pub tools: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperienceEntry {
    pub role: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    pub highlights: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EducationEntry {
    pub degree: &'static str,
    pub institution: &'static str,
    pub location: &'static str,
    pub year: &'static str,
    pub score: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectEntry {
    pub title: &'static str,
    pub description: &'static str,
    pub link: &'static str,
    pub technologies: &'static [&'static str],
}

impl ProjectEntry {
    /// The project's link, unless it is the `"#"` placeholder.
    pub fn external_link(&self) -> Option<&'static str> {
        if self.link == PLACEHOLDER_LINK || self.link.is_empty() {
            None
        } else {
            Some(self.link)
        }
    }
}

pub const PROFILE: Profile = Profile {
    name: "Shafana",
    tagline: "Computer Science Graduate | Data Analyst | Software Developer",
    bio: &[
        "As a recent Computer Science graduate with a strong foundation in data analysis and process optimization, I bring 7 months of hands-on software development experience from my internship at CodeCraft Technologies. My journey in tech is driven by a passion for leveraging data to drive decisions and optimize workflows.",
        "I specialize in full-stack development, with proficiency in JavaScript, TypeScript, React.js, Next.js, and Express.js. My experience extends to working with SQL databases and utilizing tools like Excel and Drizzle ORM for comprehensive data analysis.",
        "What sets me apart is my ability to bridge the gap between technical implementation and business objectives. I thrive in collaborative environments, having worked effectively with cross-functional teams to deliver scalable web applications that not only meet technical requirements but also align closely with business goals.",
    ],
    email: "shifashafana14@gmail.com",
    phone: "8971091841",
    linkedin: ProfileLink {
        label: "linkedin.com/in/shafanashafi",
        href: "https://www.linkedin.com/in/shafanashafi",
    },
    github: ProfileLink {
        label: "github.com/Shafana53",
        href: "https://github.com/Shafana53",
    },
};

pub const SKILLS: [SkillEntry; 8] = [
    SkillEntry {
        skill: "Data Analysis & Process Mapping",
        tools: "SQL, Excel, Drizzle ORM",
    },
    SkillEntry {
        skill: "Business Process Improvement",
        tools: "Workflow optimization, Data-driven decision making",
    },
    SkillEntry {
        skill: "Full-Stack Development",
        tools: "JavaScript, TypeScript, React.js, Next.js, Express.js",
    },
    SkillEntry {
        skill: "Project Management",
        tools: "Test-Driven Development (TDD), Git version control",
    },
    SkillEntry {
        skill: "Database Management",
        tools: "MySQL, PostgreSQL",
    },
    SkillEntry {
        skill: "API Development",
        tools: "RESTful APIs, GraphQL",
    },
    SkillEntry {
        skill: "UI/UX Design",
        tools: "Figma, Adobe XD",
    },
    SkillEntry {
        skill: "Cloud Services",
        tools: "AWS, Google Cloud Platform",
    },
];

pub const EXPERIENCE: [ExperienceEntry; 1] = [ExperienceEntry {
    role: "Intern Software Engineer",
    company: "CodeCraft Technologies",
    location: "Mangaluru",
    period: "February 2024 - September 2024",
    highlights: &[
        "Conducted in-depth data analysis and process optimization within full-stack development projects, enhancing data workflows and team productivity by 30%.",
        "Gained hands-on experience in Test-Driven Development (TDD) and collaborative coding using Git, with a focus on optimizing data integrity and process efficiency.",
        "Automated various aspects of web application workflows, including data processing and validation, resulting in a 40% reduction in manual data entry errors.",
        "Developed a strong ability to collaborate with cross-functional teams, focusing on seamless integration of data processes and aligning with business objectives.",
        "Contributed to the development of scalable web applications using React.js and Next.js, improving application performance by 25%.",
    ],
}];

pub const EDUCATION: [EducationEntry; 3] = [
    EducationEntry {
        degree: "BE-Computer Science",
        institution: "Sahyadri College Of Engineering and Management",
        location: "Mangaluru",
        year: "2024",
        score: "8.77",
    },
    EducationEntry {
        degree: "P.U.C",
        institution: "Mother Teresa's PU College",
        location: "Shankarnarayana, Udupi",
        year: "2020",
        score: "95%",
    },
    EducationEntry {
        degree: "SSLC",
        institution: "Govt. High School",
        location: "Siddapura",
        year: "2018",
        score: "96%",
    },
];

pub const PROJECTS: [ProjectEntry; 3] = [
    ProjectEntry {
        title: "Library Management Web System",
        description: "Developed a full-stack library management system using TypeScript, MySQL, React.js, and Express.js. Integrated RazorPay for payments, Calendly for scheduling, and Google OAuth for user authentication.",
        link: "https://nextjs-library-management-2ezx.vercel.app/en",
        technologies: &[
            "TypeScript",
            "MySQL",
            "React.js",
            "Express.js",
            "RazorPay",
            "Google OAuth",
        ],
    },
    ProjectEntry {
        title: "Bill Splitter",
        description: "Developed a dynamic web application using React.js to manage and split expenses among group members, streamlining shared cost tracking and payments. Implemented real-time updates and intuitive user interface for easy expense management.",
        link: "https://github.com/Shafana53",
        technologies: &["React.js", "Node.js", "MongoDB", "Socket.io"],
    },
    ProjectEntry {
        title: "Data Visualization Dashboard",
        description: "Created an interactive data visualization dashboard using D3.js and React, showcasing complex datasets in an easily understandable format. Implemented various chart types and filtering options for in-depth data exploration.",
        link: PLACEHOLDER_LINK,
        technologies: &["D3.js", "React", "Node.js", "Express.js"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_links_have_no_target() {
        let linked = PROJECTS
            .iter()
            .filter_map(|p| p.external_link())
            .collect::<Vec<_>>();
        assert_eq!(
            linked,
            vec![
                "https://nextjs-library-management-2ezx.vercel.app/en",
                "https://github.com/Shafana53",
            ]
        );
        assert_eq!(PROJECTS[2].external_link(), None);
    }

    #[test]
    fn test_skill_list_order() {
        assert_eq!(SKILLS.len(), 8);
        assert_eq!(SKILLS[0].skill, "Data Analysis & Process Mapping");
        assert_eq!(SKILLS[7].skill, "Cloud Services");
    }

    #[test]
    fn test_profile_links_are_absolute() {
        for link in [PROFILE.linkedin, PROFILE.github] {
            assert!(link.href.starts_with("https://"), "{}", link.href);
        }
    }
}
