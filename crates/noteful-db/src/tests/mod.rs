mod note_repository_tests;
