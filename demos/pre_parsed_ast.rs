use scicalc_rs::ast::{evaluate, EvaluationMode, Parser};
use scicalc_rs::format::format_result;

fn main() {
    pretty_env_logger::init();

    let expression = "asin(0.5) + cos(pi)";
    let ast = Parser::parse_expression(expression).expect("Failed to parse");

    for mode in [EvaluationMode::Degrees, EvaluationMode::Radians] {
        match evaluate(&ast, mode) {
            Ok(result) => println!("[{}] {} = {}", mode, expression, format_result(result)),
            Err(err) => println!("[{}] Error: {}", mode, err),
        }
    }
}
