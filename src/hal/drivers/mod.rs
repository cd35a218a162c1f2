pub mod proc_card;

pub use proc_card::ProcCard;
