mod server;

pub use server::GreetServiceImpl;
