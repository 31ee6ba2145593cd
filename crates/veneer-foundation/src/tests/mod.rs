mod engine_state_tests;
