pub mod gallery;
pub mod instagram;
