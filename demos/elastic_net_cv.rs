extern crate enetpath;

use enetpath::{
    helpers::{helpers::mean_squared_error, test_helpers::random_design},
    DatasetBase, ElasticNetCV, Fit, Predict,
};
use ndarray::array;

fn main() {
    // Five predictors, only the first three carry signal
    let x = random_design(400, 5, 7);
    let noise = random_design(400, 1, 8).column(0).to_owned();
    let y = x.dot(&array![3., -2., 0.5, 0., 0.]) + noise * 0.8 + 1.;
    let dataset = DatasetBase::from((x, y));

    let (train, test) = dataset.split_with_ratio(0.8, 42).unwrap();
    println!(
        "#### {} training rows, {} test rows",
        train.n_samples(),
        test.n_samples()
    );

    println!("#### Cross-validating a lasso path...");
    let lasso = ElasticNetCV::params()
        .alpha(1.)
        .n_lambdas(50)
        .fit(&train)
        .unwrap();

    println!("#### Cross-validating an elastic net path (alpha = 0.5)...");
    let elastic_net = ElasticNetCV::params()
        .alpha(0.5)
        .n_lambdas(50)
        .fit(&train)
        .unwrap();

    for (name, cv) in [("lasso", &lasso), ("elastic net", &elastic_net)] {
        println!("\n{}", name);
        println!("{:>12} {:>12} {:>12} {:>8}", "lambda", "cv mse", "std error", "df");
        let n_nonzero = cv.path().n_nonzero();
        for idx in (0..cv.lambdas().len()).step_by(7) {
            println!(
                "{:>12.6} {:>12.6} {:>12.6} {:>8}",
                cv.lambdas()[idx],
                cv.cv_mean()[idx],
                cv.cv_std_error()[idx],
                n_nonzero[idx]
            );
        }

        for (label, model) in [("lambda.min", cv.best_model()), ("lambda.1se", cv.model_1se())] {
            let y_pred = model.predict(test.design_matrix()).unwrap();
            println!(
                "{} = {:.6} :: intercept {:.4} :: coefficients {:.4} :: test mse {:.6}",
                label,
                model.lambda(),
                model.intercept(),
                model.coefficients(),
                mean_squared_error(test.targets(), &y_pred)
            );
        }
    }
}
