pub mod card;
pub mod parse;
pub mod run;

#[cfg(test)]
pub mod test_support;
