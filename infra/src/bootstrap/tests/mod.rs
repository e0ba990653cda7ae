mod sequence_tests;
