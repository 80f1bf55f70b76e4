extern crate schumaker_spline;

use schumaker_spline::SchumakerSpline;

fn main() {

    let x = [0.0, 1.0, 3.0, 4.0, 6.0];
    let y = [0.0, 0.5, 0.6, 1.0, 1.1];

    let spline = SchumakerSpline::from_slices(&x, &y, None).unwrap();
    let (knots, coefficients) = spline.to_arrays();

    println!("{} data points, {} inserted knots", x.len(), spline.inserted_knots());
    println!("knot;value;a;b;c");
    for (i, knot) in knots.iter().enumerate() {
        let value = spline.interpolate(*knot).unwrap();
        if i < coefficients.nrows() {
            let row = coefficients.row(i);
            println!("{:.4};{:.4};{:.4};{:.4};{:.4}", knot, value, row[0], row[1], row[2]);
        } else {
            println!("{:.4};{:.4};;;", knot, value);
        }
    }
}
