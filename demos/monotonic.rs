extern crate schumaker_spline;

use schumaker_spline::{schumaker_spline, ReturnType};

fn main() {

    let x = [0.0, 1.0, 3.0, 4.0, 6.0];
    let y = [0.0, 0.5, 0.6, 1.0, 1.1];

    let spline = schumaker_spline(&x, &y, None, ReturnType::Symbolic)
        .unwrap()
        .into_piecewise()
        .unwrap();

    println!("{}", spline);

    let number_of_steps = 60;
    let (x_min, x_max) = spline.domain().unwrap();
    let step = (x_max - x_min) / number_of_steps as f64;

    println!("x;y");
    for i in 0..=number_of_steps {
        let x = x_min + step * i as f64;
        println!("{:.2};{:.4}", x, spline.subs(x).unwrap());
    }
}
