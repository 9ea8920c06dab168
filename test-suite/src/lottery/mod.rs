pub mod setup;

#[cfg(test)]
mod tests;
