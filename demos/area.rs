use wirenet::Network;

fn main() {
    let network = Network::new();
    let height = network.make_named("Height", 0.0);
    let width = network.make_named("Width", 0.0);
    let area = height * width;
    area.le(network.constant(1234.0));

    height.set(10.0).expect("height within constraints");
    width.set(5.0).expect("width within constraints");

    print!("{}", height.dump());
    println!("height may grow to {}", height.range().upper);

    if let Err(violation) = width.set(300.0) {
        println!("rejected: {violation}");
    }
}
