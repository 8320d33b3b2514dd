// CrimeStoppers homepage - browser entry point (trunk, `csr` feature)

fn main() {
    crimestoppers_site::mount_homepage();
}
