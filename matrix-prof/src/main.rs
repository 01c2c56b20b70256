use clap::{value_t, App, Arg};
use fourier_matrix::{create_engine, Normalization};
use ndarray::Array2;
use num_complex::Complex;
use rand::{distributions::Standard, Rng};

fn main() {
    let matches = App::new("matrix-prof")
        .arg(Arg::with_name("rows").takes_value(true).required(true))
        .arg(Arg::with_name("cols").takes_value(true).required(true))
        .arg(
            Arg::with_name("operation")
                .long("operation")
                .takes_value(true)
                .possible_values(&["fwd1d", "fwd1d-real", "inv1d", "fwd2d", "fwd2d-real", "inv2d"])
                .default_value("fwd2d"),
        )
        .arg(
            Arg::with_name("normalization")
                .long("normalization")
                .takes_value(true)
                .possible_values(&["backward", "unscaled", "ortho"])
                .default_value("backward"),
        )
        .get_matches();

    let rows = value_t!(matches, "rows", usize).unwrap_or_else(|e| e.exit());
    let cols = value_t!(matches, "cols", usize).unwrap_or_else(|e| e.exit());
    let normalization = match matches.value_of("normalization") {
        Some("unscaled") => Normalization::Unscaled,
        Some("ortho") => Normalization::Ortho,
        _ => Normalization::Backward,
    };
    let mut engine = create_engine::<f32>(normalization);

    let mut rng = rand::thread_rng();
    let input: Array2<Complex<f32>> = Array2::from_shape_fn((rows, cols), |_| {
        Complex::new(rng.sample(Standard), rng.sample(Standard))
    });
    let real = input.mapv(|z| z.re);

    let operation = matches.value_of("operation").unwrap_or("fwd2d");
    loop {
        let result = match operation {
            "fwd1d" => engine.fwd1d(&input),
            "fwd1d-real" => engine.fwd1d_real(&real),
            "inv1d" => engine.inv1d(&input),
            "fwd2d-real" => engine.fwd2d_real(&real),
            "inv2d" => engine.inv2d(&input),
            _ => engine.fwd2d(&input),
        };
        if let Err(error) = result {
            eprintln!("matrix-prof: {}", error);
            std::process::exit(1);
        }
    }
}
