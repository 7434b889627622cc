use densemat::{gauss, Mat};

fn init_logger() {
    use simplelog::*;

    TermLogger::init(
        LevelFilter::Debug,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto
    ).unwrap()
}

fn main() {
    init_logger();

    let b = Mat::from_rows(vec![
        vec![1.0, 3.0, 2.0],
        vec![2.0, 7.0, 7.0],
        vec![2.0, 5.0, 2.0]
    ]);
    let v = Mat::from_rows(vec![
        vec![ 2.0],
        vec![-1.0],
        vec![ 7.0]
    ]);

    match gauss::solve(&b, &v) {
        Ok(x) => print!("{x}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1)
        }
    }
}
