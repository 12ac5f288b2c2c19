pub mod db;
pub mod people;
