//! Reproducibility report: evaluates every function of the crate over a
//! deterministic input vector and prints the bit digest of each result, so
//! runs on different machines (or with truncated mantissas) can be diffed.
//!
//!  cargo run --bin detfloat_report --release

use detfloat::{
    bit_digest, calc_pi, compare, cos_vec, generate_numbers, pi,
    reciprocal_vec, sin_vec, sqrt_vec, tan_vec, NEWTON_ITERS, LOGISTIC_R,
};

const N: usize = 1024 * 1024;

fn report(name: &str, values: &[f64]) {
    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    println!(
        "{:10} hash = {} min={:.15e} max={:.15e}",
        name,
        bit_digest(values),
        min,
        max
    );
}

fn main() {
    let mut ok = true;

    // Reproducible numbers between 0 and 1.
    let x01 = generate_numbers(N, LOGISTIC_R, 0.5, 987654);
    print!("Generated test numbers: ");
    for v in &x01[..4] {
        print!("{:.15e}, ", v);
    }
    println!("...");
    report("input", &x01);

    let again = generate_numbers(N, LOGISTIC_R, 0.5, 987654);
    let c = compare(&x01, &again);
    if !c.matches() {
        println!("{}", c);
        println!(" X Generated test numbers did not reproduce!");
        ok = false;
    }

    // The constant.
    let estimate = calc_pi(5);
    println!("calc_pi(5) = {:.15}", estimate);
    if (estimate - core::f64::consts::PI).abs() > 5e-15 {
        println!(" X pi estimate is off the 15-digit reference!");
        ok = false;
    }

    // Derived functions over the full input range.
    let angles: Vec<f64> = x01.iter().map(|x| (x - 0.5) * pi()).collect();
    report("sin", &sin_vec(&angles));
    report("cos", &cos_vec(&angles));
    report("tan", &tan_vec(&angles));
    report("recip", &reciprocal_vec(&x01, NEWTON_ITERS));
    report("sqrt", &sqrt_vec(&x01, NEWTON_ITERS));

    // Each derived vector must reproduce bit-for-bit within the process too.
    let s1 = sin_vec(&angles);
    let s2 = sin_vec(&angles);
    if bit_digest(&s1) != bit_digest(&s2) {
        println!(" X sin() is not deterministic!");
        ok = false;
    }

    if !ok {
        std::process::exit(1);
    }
    println!("All reproducibility checks passed.");
}
