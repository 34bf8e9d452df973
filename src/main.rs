use anyhow::{Context, Error};
use clap::Parser;
use concordium_marketplace_client::{
    AddParams, ContractInfo, MarketplaceClient, NodeWallet, Outcomes, Purchase, TokenAmount,
    TokenId, DEFAULT_NODE_ENDPOINT,
};
use concordium_rust_sdk::{
    smart_contracts::common::{AccountAddress, Amount, ContractAddress},
    types::Energy,
    v2,
};
use num_bigint::BigUint;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Command line flags.
#[derive(clap::Parser, Debug)]
#[clap(author, version, about)]
struct App {
    #[clap(
        long = "node",
        default_value = DEFAULT_NODE_ENDPOINT,
        help = "V2 API of the Concordium node."
    )]
    url:      v2::Endpoint,
    #[clap(
        long = "account",
        help = "Path to the file containing the Concordium account keys exported from the wallet \
                (e.g. ./myPath/3PXwJYYPf6fyVb4GJquxSZU8puxrHfzc4XogdMVot8MUQK53tW.export)."
    )]
    key_file: PathBuf,
    #[clap(long = "index", help = "Index of the marketplace contract instance.")]
    index:    u64,
    #[clap(long = "subindex", default_value = "0", help = "Subindex of the marketplace instance.")]
    subindex: u64,
    #[clap(subcommand)]
    command:  Command,
}

#[derive(clap::Subcommand, Debug)]
enum Command {
    /// Print the tokens that can be bought, as JSON.
    List,
    /// List a token on the marketplace.
    Add {
        #[clap(long = "nft-index", help = "Index of the CIS-2 contract of the token.")]
        nft_index:    u64,
        #[clap(long = "nft-subindex", default_value = "0")]
        nft_subindex: u64,
        #[clap(long = "token-id", help = "Hex encoded token id.")]
        token_id:     TokenId,
        #[clap(long = "price", help = "Price per unit in micro CCD.")]
        price:        u64,
        #[clap(long = "royalty", default_value = "0", help = "Royalty in basis points.")]
        royalty:      u16,
        #[clap(long = "quantity", default_value = "1")]
        quantity:     TokenAmount,
        #[clap(long = "energy", help = "Maximum execution energy. Defaults to 9999.")]
        energy:       Option<u64>,
    },
    /// Buy a listed token.
    Transfer {
        #[clap(long = "nft-index", help = "Index of the CIS-2 contract of the token.")]
        nft_index:    u64,
        #[clap(long = "nft-subindex", default_value = "0")]
        nft_subindex: u64,
        #[clap(long = "token-id", help = "Hex encoded token id.")]
        token_id:     TokenId,
        #[clap(long = "price", help = "Listed price per unit in micro CCD.")]
        price:        BigUint,
        #[clap(long = "owner", help = "Account currently owning the listed token.")]
        owner:        AccountAddress,
        #[clap(long = "quantity", default_value = "1")]
        quantity:     BigUint,
        #[clap(long = "energy", help = "Maximum execution energy. Defaults to 6000.")]
        energy:       Option<u64>,
    },
}

fn print_outcomes(outcomes: &Outcomes) {
    for (block, summary) in outcomes {
        println!(
            "Transaction finalized: tx_hash={} block={} energy={}",
            summary.hash, block, summary.energy_cost
        );
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let app: App = App::parse();

    let concordium_client = v2::Client::new(app.url).await?;

    let mut wallet = NodeWallet::new(concordium_client, &app.key_file)?;
    let account = wallet.key.address;

    let market = MarketplaceClient::new(
        ContractInfo::default(),
        ContractAddress::new(app.index, app.subindex),
    );

    match app.command {
        Command::List => {
            let tokens = market.list(&mut wallet).await.context("Failed to list tokens.")?;
            println!("{}", serde_json::to_string_pretty(&tokens)?);
        }
        Command::Add {
            nft_index,
            nft_subindex,
            token_id,
            price,
            royalty,
            quantity,
            energy,
        } => {
            let params = AddParams {
                nft_contract_address: ContractAddress::new(nft_index, nft_subindex).into(),
                token_id,
                price: Amount::from_micro_ccd(price),
                royalty,
                quantity,
            };
            let outcomes = market
                .add(&mut wallet, account, &params, energy.map(Energy::from))
                .await
                .context("Failed to add the token.")?;
            print_outcomes(&outcomes);
        }
        Command::Transfer {
            nft_index,
            nft_subindex,
            token_id,
            price,
            owner,
            quantity,
            energy,
        } => {
            let purchase = Purchase {
                nft_contract_address: ContractAddress::new(nft_index, nft_subindex),
                token_id,
                price,
                owner,
                quantity,
            };
            let outcomes = market
                .transfer(&mut wallet, account, purchase, energy.map(Energy::from))
                .await
                .context("Failed to transfer the token.")?;
            print_outcomes(&outcomes);
        }
    }

    Ok(())
}
