mod db_connection_test;
mod record_test;
