pub mod progress;

pub fn print_banner() {
    println!("oscillating-point-rs");
}
