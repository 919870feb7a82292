mod table_tests;
