pub mod generate;
pub mod lastmod;
