mod array_tests;
mod figure_tests;
mod pickle_tests;
