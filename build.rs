fn main() {
    // Only the on-device build needs the ESP-IDF environment; host builds
    // (driver library tests) skip it.
    if std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("espidf") {
        embuild::espidf::sysenv::output();
    }
}
