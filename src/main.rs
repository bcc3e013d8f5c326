use clap::Parser;
use heating_cost_table::app;
use tracing_subscriber::EnvFilter;

/// 프로그램의 엔트리 포인트. 인자를 읽고 표 이미지를 만든 뒤 경로를 출력한다.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = app::Args::parse();
    match app::run_with_config_file(&args) {
        Ok(path) => println!("{}", path.display()),
        Err(err) => {
            eprintln!("오류: {err}");
            std::process::exit(1);
        }
    }
}
