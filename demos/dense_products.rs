use morpheus::{Matrix, Multiply, PrintOptions, Report, Vector};
use rand::Rng;

fn main() -> std::io::Result<()> {
    env_logger::init();

    let n = 4;
    let mut rng = rand::thread_rng();
    let mut a = Matrix::new(n, n);
    for r in 0..n {
        for c in 0..n {
            a[(r, c)] = rng.gen_range(-1.0..1.0);
        }
    }

    let mut x = Vector::new(n);
    x.set_value(1.0);
    let mut y = Vector::new(n);
    a.multiply(&x, &mut y);

    let mut aa = Matrix::new(n, n);
    a.multiply(&a, &mut aa);

    let opts = PrintOptions::with_precision(4);
    let mut out = std::io::stdout().lock();
    a.report(&mut out, &opts)?;
    y.report(&mut out, &opts)?;
    aa.report(&mut out, &opts)?;
    println!(
        "row sums: norm_inf = {:.4}, y.norm_inf = {:.4}, symmetric: {}",
        a.norm_inf(),
        y.norm_inf(),
        a.is_symmetric()
    );
    Ok(())
}
