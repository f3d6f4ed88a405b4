/// Skip a test if AWS credentials are not configured.
#[macro_export]
macro_rules! skip_without_aws {
    () => {
        if std::env::var("AWS_ACCESS_KEY_ID").is_err() {
            eprintln!("SKIPPED: AWS_ACCESS_KEY_ID not set");
            return;
        }
        if std::env::var("GANTRY_TEST_SSM").is_err() {
            eprintln!("SKIPPED: GANTRY_TEST_SSM not set (set to any value to opt in)");
            return;
        }
    };
}
