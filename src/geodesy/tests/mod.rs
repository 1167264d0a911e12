#[cfg(test)]
mod distance_tests;
#[cfg(test)]
mod search_tests;
