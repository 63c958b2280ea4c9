use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    prodnorm::example_apps::run_clean_jsonl(std::env::args().skip(1))
}
