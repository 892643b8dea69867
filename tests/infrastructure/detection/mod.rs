mod detection_client_factory_test;
mod generative_detection_client_test;
