//! Just main(). Keep as small as possible.

// Attributes here do not reach the library, so lint groups can be blanket allowed.
#![allow(clippy::cargo)]
#![allow(clippy::restriction)]

use lexis::utils::cli::run;

fn main() -> std::io::Result<()> {
    run()
}
