#[cfg(feature = "csr")]
fn main() {
    portfolio::mount();
}

#[cfg(not(feature = "csr"))]
pub fn main() {
    // no native main; build with `trunk serve` (enables `csr`)
    // see lib.rs for the mount function
}
