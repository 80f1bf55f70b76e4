extern crate schumaker_spline;

use schumaker_spline::SchumakerSpline;

fn main() {

    // gradual start, sharp jump, then slight decrease
    let x = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    let y = [0.0, 0.1, 0.2, 0.15, 1.5, 1.6, 1.55];

    let spline = SchumakerSpline::from_slices(&x, &y, None).unwrap();

    println!("knots: {:?}", spline.knots());
    println!("{}", spline.to_piecewise());

    let number_of_steps = 120;
    let step = 6.0 / number_of_steps as f64;

    let mut x_vector = Vec::new();
    for i in 0..=number_of_steps {
        x_vector.push(step * i as f64);
    }

    let result = spline.batch_interpolate(&x_vector).unwrap();

    println!("x;y");
    for i in 0..=number_of_steps {
        println!("{:.2};{:.4}", x_vector[i], result[i]);
    }
}
