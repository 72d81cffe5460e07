use restcheck_lib::Client;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
struct Opt {
    #[structopt(long, default_value = "http://127.0.0.1:8080/rest/test")]
    server: String,
    #[structopt(long, default_value = "1")]
    id: i32,
    #[structopt(long, default_value = "name")]
    name: String,
}

fn main() -> anyhow::Result<()> {
    let opt = Opt::from_args();
    let client = Client::new(opt.server.clone())?;

    println!("Connecting to server: {}", opt.server);

    let profile = client.get_profile(opt.id, &opt.name)?;
    println!("Fetched profile: {:?}", profile);

    let upgraded = client.upgrade_profile(&profile)?;
    println!("Upgraded profile: {:?}", upgraded);

    Ok(())
}
