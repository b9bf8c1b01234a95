pub mod db;

pub mod shifts;
