mod conjugation;
pub mod dispatch;
mod practice;
mod review;
mod shared;
mod word;
mod wotm;
