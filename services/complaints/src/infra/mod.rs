pub mod db;
pub mod images;
