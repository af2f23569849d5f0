pub mod maybe;

#[cfg(test)]
mod scenarios;
