pub mod paste;
pub mod run;
pub mod simulate;
