fn main() {
    env_logger::init();
    golf_settle::cli::run();
}
