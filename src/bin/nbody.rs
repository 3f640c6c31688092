use crossbench::program::run_standalone;
use crossbench::KernelId;

fn main() {
    run_standalone(KernelId::Nbody)
}
