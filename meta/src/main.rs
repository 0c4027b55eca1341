fn main() {
    multiversx_sc_meta_lib::cli_main::<prom_voting::AbiProvider>();
}
