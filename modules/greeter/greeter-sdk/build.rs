fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=proto/callbox/greeter/v1/greeter.proto");
    println!("cargo:rerun-if-changed=proto");

    tonic_prost_build::configure()
        .build_client(true)
        .build_server(true)
        .compile_protos(&["proto/callbox/greeter/v1/greeter.proto"], &["proto"])?;

    Ok(())
}
