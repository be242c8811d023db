mod overlap_tests;
