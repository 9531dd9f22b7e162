mod upload_service_test;
