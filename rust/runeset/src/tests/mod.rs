mod is_tests;
mod random_tests;
mod strategy_tests;
