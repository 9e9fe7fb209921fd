fn main() {
    zerobyte_site::app::cli::run();
}
