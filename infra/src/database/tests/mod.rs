mod mongo_tests;
