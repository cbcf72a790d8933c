
mod extraction_test;
mod rotation_test;
mod update_cycle_test;
