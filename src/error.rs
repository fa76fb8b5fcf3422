use thiserror::Error;

use crate::sections::SectionId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ViewportError {
    #[error("no browser window available")]
    NoWindow,
    #[error("no document available")]
    NoDocument,
    #[error("section element not found: #{0}")]
    MissingSection(SectionId),
    #[error("could not read {0} from the browser")]
    Measurement(&'static str),
    #[error("popup blocked while opening {0}")]
    PopupBlocked(String),
    #[error("browser call failed: {0}")]
    Js(String),
}
