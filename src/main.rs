fn main() {
    dockctx::app::cli::run();
}
