fn main() {
    env_logger::init();

    mandelzoom::run_gui();
}
