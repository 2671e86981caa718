fn main() -> anyhow::Result<()> {
    energuide_api::main()
}
