fn main() {
    basic_grader::cli::run();
}
