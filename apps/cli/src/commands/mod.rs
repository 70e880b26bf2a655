pub mod cut;
pub mod timeline;
