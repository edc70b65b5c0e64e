fn main() {
    webskel::app::cli::run();
}
