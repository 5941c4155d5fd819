use casewise::case;
use casewise::Casewise;
use casewise_derive::Casewise;

#[derive(Casewise, Debug)]
pub enum Shape {
    Circle(f64),
    Rect { width: f64, height: f64 },
}

fn main() {
    let circle = Shape::cases().circle();

    let shape = circle.embed(2.0);
    println!("shape: {:?}", shape);
    println!("radius: {:?}", circle.extract(shape));

    let rect = case!(Shape, Rect { width, height });
    println!("rect: {:?}", rect.embed((3.0, 4.0)));
    println!("not a rect: {:?}", rect.extract(Shape::Circle(1.0)));
}
