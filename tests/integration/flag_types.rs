use envoverlay::override_from_env;
use envoverlay::FlagSet;
use std::time::Duration;

use super::EnvGuard;

#[test]
fn every_built_in_type_is_overridden() {
    let prefix = "OVERRIDEFROMENVTEST_";
    let _env = EnvGuard::set(&[
        ("OVERRIDEFROMENVTEST_BOOLTEST", "false"),
        ("OVERRIDEFROMENVTEST_DURATIONTEST", "2h"),
        ("OVERRIDEFROMENVTEST_FLOATTEST", "0.2"),
        ("OVERRIDEFROMENVTEST_INTTEST", "2"),
        ("OVERRIDEFROMENVTEST_INT32TEST", "-2"),
        ("OVERRIDEFROMENVTEST_STRINGTEST", "newvalue"),
        ("OVERRIDEFROMENVTEST_UINTTEST", "2"),
        ("OVERRIDEFROMENVTEST_UINT16TEST", "2"),
    ]);

    let mut fs = FlagSet::new("test");
    fs.define("booltest", true, "").unwrap();
    fs.define("durationtest", Duration::from_secs(3600), "").unwrap();
    fs.define("floattest", 0.1_f64, "").unwrap();
    fs.define("inttest", 1_i64, "").unwrap();
    fs.define("int32test", 1_i32, "").unwrap();
    fs.define("stringtest", "default".to_string(), "").unwrap();
    fs.define("uinttest", 1_u64, "").unwrap();
    fs.define("uint16test", 1_u16, "").unwrap();

    override_from_env(&mut fs, prefix).unwrap();

    assert_eq!(fs.get::<bool>("booltest"), Some(false));
    assert_eq!(fs.get::<Duration>("durationtest"), Some(Duration::from_secs(7200)));
    assert_eq!(fs.get::<f64>("floattest"), Some(0.2));
    assert_eq!(fs.get::<i64>("inttest"), Some(2));
    assert_eq!(fs.get::<i32>("int32test"), Some(-2));
    assert_eq!(fs.get::<String>("stringtest").as_deref(), Some("newvalue"));
    assert_eq!(fs.get::<u64>("uinttest"), Some(2));
    assert_eq!(fs.get::<u16>("uint16test"), Some(2));
}

#[test]
fn every_built_in_type_is_overridden_with_normalized_keys() {
    let _env = EnvGuard::set(&[
        ("OVERRIDEFROMENVTEST_BOOL_TEST", "false"),
        ("OVERRIDEFROMENVTEST_DURATION_TEST", "2h"),
        ("OVERRIDEFROMENVTEST_FLOAT_TEST", "0.2"),
        ("OVERRIDEFROMENVTEST_INT_TEST", "2"),
        ("OVERRIDEFROMENVTEST_INT_64_TEST", "2"),
        ("OVERRIDEFROMENVTEST_STRING_TEST", "newvalue"),
        ("OVERRIDEFROMENVTEST_UINT_TEST", "2"),
        ("OVERRIDEFROMENVTEST_UINT_64_TEST", "2"),
    ]);

    let mut fs = FlagSet::new("test");
    fs.define("bool-test", true, "").unwrap();
    fs.define("duration-test", Duration::from_secs(3600), "").unwrap();
    fs.define("float-test", 0.1_f64, "").unwrap();
    fs.define("int-test", 1_i64, "").unwrap();
    fs.define("int-64-test", 1_i64, "").unwrap();
    fs.define("string-test", "default".to_string(), "").unwrap();
    fs.define("uint-test", 1_u64, "").unwrap();
    fs.define("uint_64-test", 1_u64, "").unwrap();

    override_from_env(&mut fs, "OVERRIDEFROMENVTEST").unwrap();

    assert_eq!(fs.get::<bool>("bool-test"), Some(false));
    assert_eq!(fs.get::<Duration>("duration-test"), Some(Duration::from_secs(7200)));
    assert_eq!(fs.get::<f64>("float-test"), Some(0.2));
    assert_eq!(fs.get::<i64>("int-test"), Some(2));
    assert_eq!(fs.get::<i64>("int-64-test"), Some(2));
    assert_eq!(fs.get::<String>("string-test").as_deref(), Some("newvalue"));
    assert_eq!(fs.get::<u64>("uint-test"), Some(2));
    assert_eq!(fs.get::<u64>("uint_64-test"), Some(2));
}
