// ============================================================
// STATIC FALLBACK IDENTIFIERS
// ============================================================
// Legacy hub pages published before identifiers were embedded in the
// URL. Append-only reference data: path fragment -> fixed identifier,
// consulted only after pattern extraction fails. Order matters, some
// fragments are substrings of others. Non-Latin locales share the
// English entry, which is why lookups can collide on one identifier.

/// Ordered (url path fragment, identifier) pairs.
pub(super) static STATIC_HUB_IDS: &[(&str, &str)] = &[
    ("coronavirus/policy-responses/a-debt-standstill-for-the-poorest-countries-how-much-is-at-stake", "462eabd8"),
    ("coronavirus/policy-responses/a-systemic-resilience-approach-to-dealing-with-covid-19-and-future-shocks", "36a5bdfb"),
    ("coronavirus/policy-responses/access-to-covid-19-vaccines-global-approaches-in-a-global-crisis", "c6a18370"),
    ("coronavirus/policy-responses/accroitre-la-resilience-face-a-la-pandemie-de-covid-19-le-role-des-centres-de-gouvernement", "7c177686"),
    ("coronavirus/policy-responses/administration-fiscale-la-resilience-numerique-dans-le-contexte-du-covid-19", "addaac0c"),
    ("coronavirus/policy-responses/administration-fiscale-risques-lies-a-la-pandemie-de-covid-19-en-matiere-de-protection-de-la-vie-privee-de-confidentialite-des-donnees-et-de-fraude", "3dc8210d"),
    ("coronavirus/policy-responses/adult-learning-and-covid-19-how-much-informal-and-non-formal-learning-are-workers-missing", "56a96569"),
    ("coronavirus/policy-responses/africa-s-response-to-covid-19-what-roles-for-trade-manufacturing-and-intellectual-property", "73d0dfaf"),
    ("coronavirus/policy-responses/an-assessment-of-the-impact-of-covid-19-on-job-and-skills-demand-using-online-job-vacancy-data", "20fff09e"),
    ("coronavirus/policy-responses/apoio-as-pessoas-e-empresas-para-lidar-com-o-virus-covid-19-opcoes-de-respostas-imediatas-para-o-emprego-e-as-politicas-sociais", "3771a5e3"),
    ("coronavirus/policy-responses/apoyar-a-las-personas-y-las-empresas-para-combatir-el-covid-19-opciones-para-una-respuesta-inmediata-en-materia-de-empleo-y-politica-social", "4752b583"),
    ("coronavirus/policy-responses/apporter-une-reponse-englobant-toutes-les-composantes-de-la-societe-face-aux-consequences-de-la-crise-du-covid-19-sur-la-sante-mentale", "f4d9703f"),
    ("coronavirus/policy-responses/aprender-a-distancia-cuando-las-escuelas-cierran-cuan-bien-estan-preparados-los-estudiantes-y-las-escuelas-ensenanzas-de-pisa", "4ead1e4b"),
    ("coronavirus/policy-responses/beyond-containment-health-systems-responses-to-covid-19-in-the-oecd", "6ab740c0"),
    ("coronavirus/policy-responses/biodiversite-et-reponse-economique-au-covid-19-assurer-une-reprise-verte-et-resiliente", "0c20417e"),
    ("coronavirus/policy-responses/biodiversity-and-the-economic-response-to-covid-19-ensuring-a-green-and-resilient-recovery", "d98b5a09"),
    ("coronavirus/policy-responses/building-a-coherent-response-for-a-sustainable-post-covid-19-recovery", "d67eab68"),
    ("coronavirus/policy-responses/building-back-better-a-sustainable-resilient-recovery-after-covid-19", "52b869f5"),
    ("coronavirus/policy-responses/building-resilience-to-the-covid-19-pandemic-the-role-of-centres-of-government", "883d2961"),
    ("coronavirus/policy-responses/business-dynamism-during-the-covid-19-pandemic-which-policies-for-an-inclusive-recovery", "f08af011"),
    ("coronavirus/policy-responses/capacity-for-remote-working-can-affect-lockdown-costs-differently-across-places", "0e85740e"),
    ("coronavirus/policy-responses/cities-policy-responses", "fd1053ff"),
    ("coronavirus/policy-responses/combatir-el-efecto-de-covid-19-en-los-ninos", "34c42a7c"),
    ("coronavirus/policy-responses/combatting-covid-19-disinformation-on-online-platforms", "d854ec48"),
    ("coronavirus/policy-responses/combatting-covid-19-s-effect-on-children", "2e1f3b2f"),
    ("coronavirus/policy-responses/combattre-la-desinformation-sur-le-covid-19-sur-les-plateformes-en-ligne", "e17b4532"),
    ("coronavirus/policy-responses/comment-communiquer-efficacement-sur-les-migrations-et-l-integration-dans-le-contexte-du-covid-19", "0aac467b"),
    ("coronavirus/policy-responses/connecting-businesses-and-consumers-during-covid-19-trade-in-parcels", "d18de131"),
    ("coronavirus/policy-responses/consequences-environnementales-a-long-terme-du-covid-19", "3f6e0c70"),
    ("coronavirus/policy-responses/contribution-des-medecins-et-des-infirmiers-migrants-a-la-lutte-contre-la-crise-du-covid-19-dans-les-pays-de-l-ocde", "63ff0143"),
    ("coronavirus/policy-responses/contribution-of-migrant-doctors-and-nurses-to-tackling-covid-19-crisis-in-oecd-countries", "2f7bace2"),
    ("coronavirus/policy-responses/conventions-fiscales-et-impact-de-la-crise-du-covid-19-analyse-du-secretariat-de-l-ocde", "f856f704"),
    ("coronavirus/policy-responses/coronavirus-covid-19-sme-policy-responses", "04440101"),
    ("coronavirus/policy-responses/coronavirus-covid-19-vaccines-for-developing-countries-an-equal-shot-at-recovery", "6b0771e6"),
    ("coronavirus/policy-responses/corporate-sector-vulnerabilities-during-the-covid-19-outbreak-assessment-and-policy-responses", "a6e670ea"),
    ("coronavirus/policy-responses/covid-19-and-a-new-resilient-infrastructure-landscape", "d40a19e3"),
    ("coronavirus/policy-responses/covid-19-and-africa-socio-economic-implications-and-policy-responses", "96e1b282"),
    ("coronavirus/policy-responses/covid-19-and-fiscal-relations-across-levels-of-government", "ab438b9f"),
    ("coronavirus/policy-responses/covid-19-and-global-capital-flows", "2dc69002"),
    ("coronavirus/policy-responses/covid-19-and-global-food-systems", "aeb1434b"),
    ("coronavirus/policy-responses/covid-19-and-global-value-chains-policy-options-to-build-more-resilient-production-networks", "04934ef4"),
    ("coronavirus/policy-responses/covid-19-and-greening-the-economies-of-eastern-europe-the-caucasus-and-central-asia", "40f4d34f"),
    ("coronavirus/policy-responses/covid-19-and-international-trade-issues-and-actions", "494da2fa"),
    ("coronavirus/policy-responses/covid-19-and-key-workers-what-role-do-migrants-play-in-your-region", "42847cb9"),
    ("coronavirus/policy-responses/covid-19-and-multilateral-fisheries-management", "cc1214fe"),
    ("coronavirus/policy-responses/covid-19-and-responsible-business-conduct", "02150b06"),
    ("coronavirus/policy-responses/covid-19-and-the-aviation-industry-impact-and-policy-responses", "26d521c1"),
    ("coronavirus/policy-responses/covid-19-and-the-food-and-agriculture-sector-issues-and-policy-responses", "a23f764b"),
    ("coronavirus/policy-responses/covid-19-and-the-low-carbon-transition-impacts-and-possible-policy-responses", "749738fc"),
    ("coronavirus/policy-responses/covid-19-and-the-retail-sector-impact-and-policy-responses", "371d7599"),
    ("coronavirus/policy-responses/covid-19-crises-and-fragility", "2f17a262"),
    ("coronavirus/policy-responses/covid-19-crisis-in-the-mena-region-impact-on-gender-equality-and-policy-responses", "ee4cd4f4"),
    ("coronavirus/policy-responses/covid-19-crisis-response-in-asean-member-states", "02f828a2"),
    ("coronavirus/policy-responses/covid-19-crisis-response-in-central-asia", "5305f172"),
    ("coronavirus/policy-responses/covid-19-crisis-response-in-eastern-partner-countries", "7759afa3"),
    ("coronavirus/policy-responses/covid-19-crisis-response-in-mena-countries", "4b366396"),
    ("coronavirus/policy-responses/covid-19-crisis-response-in-south-east-european-economies", "c1aacb5a"),
    ("coronavirus/policy-responses/covid-19-crisis-y-fragilidad", "8ea010df"),
    ("coronavirus/policy-responses/covid-19-dans-la-region-mena-impact-sur-les-inegalites-de-genre-et-reponses-apportees-en-soutien-aux-femmes", "f7da7585"),
    ("coronavirus/policy-responses/covid-19-e-as-relacoes-fiscais-entre-os-niveis-de-governo", "2bb04f6c"),
    ("coronavirus/policy-responses/covid-19-e-comercio-internacional-temas-e-acoes", "db62abed"),
    ("coronavirus/policy-responses/covid-19-e-o-setor-agroalimentar-questoes-e-respostas", "3827aa9f"),
    ("coronavirus/policy-responses/covid-19-en-america-latina-y-el-caribe-consecuencias-socioeconomicas-y-prioridades-de-politica", "26a07844"),
    ("coronavirus/policy-responses/covid-19-en-america-latina-y-el-caribe-panorama-de-las-respuestas-de-los-gobiernos-a-la-crisis", "7d9f7a2b"),
    ("coronavirus/policy-responses/covid-19-en-amerique-latine-et-dans-les-caraibes-un-apercu-des-reponses-gouvernementales-a-la-crise", "ae45a602"),
    ("coronavirus/policy-responses/covid-19-et-travailleurs-essentiels-quel-role-jouent-les-immigres-dans-votre-region", "c3e86dd1"),
    ("coronavirus/policy-responses/covid-19-in-emerging-asia-regional-socio-economic-implications-and-policy-priorities", "da08f00f"),
    ("coronavirus/policy-responses/covid-19-in-latin-america-and-the-caribbean-an-overview-of-government-responses-to-the-crisis", "0a2dee41"),
    ("coronavirus/policy-responses/covid-19-in-latin-america-and-the-caribbean-regional-socio-economic-implications-and-policy-priorities", "93a64fde"),
    ("coronavirus/policy-responses/covid-19-international-mobility-and-trade-in-services-the-road-to-recovery", "ec716823"),
    ("coronavirus/policy-responses/covid-19-na-america-latina-e-no-caribe-uma-visao-geral-das-respostas-dos-governos-a-crise", "9290226e"),
    ("coronavirus/policy-responses/covid-19-na-regiao-da-america-latina-e-caribe-implicacoes-sociais-e-economicas-e-politicas-prioritarias", "433b9d11"),
    ("coronavirus/policy-responses/covid-19-pandemic-towards-a-blue-recovery-in-small-island-developing-states", "241271b7"),
    ("coronavirus/policy-responses/covid-19-protecting-people-and-societies", "e5c9de1a"),
    ("coronavirus/policy-responses/covid-19-proteger-a-las-personas-y-las-sociedades", "56ebae97"),
    ("coronavirus/policy-responses/covid-19-und-der-internationale-handel-herausforderungen-und-massnahmen", "0fc6ca7d"),
    ("coronavirus/policy-responses/covid-19-und-verantwortungsvolles-unternehmerisches-handeln", "9d5eb69f"),
    ("coronavirus/policy-responses/covid-19-y-el-sector-minorista-impacto-y-respuestas-politicas", "886315e6"),
    ("coronavirus/policy-responses/covid-19-y-la-industria-aerea-impacto-y-respuestas-politicas", "d8615a3a"),
    ("coronavirus/policy-responses/crowdsourcing-sti-policy-solutions-to-covid-19", "c4f057b3"),
    ("coronavirus/policy-responses/culture-shock-covid-19-and-the-cultural-and-creative-sectors", "08da9e0e"),
    ("coronavirus/policy-responses/dealing-with-digital-security-risk-during-the-coronavirus-covid-19-crisis", "c9d3fe8e"),
    ("coronavirus/policy-responses/del-confinamiento-a-la-recuperacion-respuestas-medioambientales-a-la-pandemia-del-covid-19", "2b7d712b"),
    ("coronavirus/policy-responses/depistage-du-covid-19-comment-utiliser-au-mieux-les-differents-tests", "1850e93e"),
    ("coronavirus/policy-responses/developing-countries-and-development-co-operation-what-is-at-stake", "50e97915"),
    ("coronavirus/policy-responses/du-confinement-a-la-reprise-les-reponses-environnementales-a-la-pandemie-de-covid-19", "88ddfed3"),
    ("coronavirus/policy-responses/e-commerce-in-the-time-of-covid-19", "3a2b78e8"),
    ("coronavirus/policy-responses/educacion-profesional-tecnica-ept-en-tiempos-de-crisis-sentar-las-bases-para-sistemas-de-ept-resilientes", "2e6eda90"),
    ("coronavirus/policy-responses/education-and-covid-19-focusing-on-the-long-term-impact-of-school-closures", "2cea926e"),
    ("coronavirus/policy-responses/education-et-covid-19-les-repercussions-a-long-terme-de-la-fermeture-des-ecoles", "7ab43642"),
    ("coronavirus/policy-responses/education-responses-to-covid-19-embracing-digital-learning-and-online-collaboration", "d75eb0e8"),
    ("coronavirus/policy-responses/effets-du-covid-19-sur-la-consommation-d-alcool-et-mesures-prises-pour-prevenir-la-consommation-nocive-d-alcool", "600e9145"),
    ("coronavirus/policy-responses/effets-positifs-potentiels-du-teletravail-sur-la-productivite-a-l-ere-post-covid-19-quelles-politiques-publiques-peuvent-aider-a-leur-concretisation", "a43c958f"),
    ("coronavirus/policy-responses/el-covid-19-y-la-conducta-empresarial-responsable", "b2efc058"),
    ("coronavirus/policy-responses/enhancing-public-trust-in-covid-19-vaccination-the-role-of-governments", "eae0ec5a"),
    ("coronavirus/policy-responses/enquete-des-risques-qui-comptent-2020-les-effets-a-long-terme-du-covid-19", "99fe0cc4"),
    ("coronavirus/policy-responses/ensuring-data-privacy-as-we-battle-covid-19", "36c2f31e"),
    ("coronavirus/policy-responses/environmental-health-and-strengthening-resilience-to-pandemics", "73784e04"),
    ("coronavirus/policy-responses/equity-injections-and-unforeseen-state-ownership-of-enterprises-during-the-covid-19-crisis", "3bdb26f0"),
    ("coronavirus/policy-responses/eviter-la-corruption-et-les-pots-de-vin-dans-les-reponses-au-covid-19-et-dans-les-mesures-de-relance", "2766c04d"),
    ("coronavirus/policy-responses/filtrage-des-investissements-pendant-la-crise-de-la-covid-19-et-au-dela", "8c27deef"),
    ("coronavirus/policy-responses/fisheries-aquaculture-and-covid-19-issues-and-policy-responses", "a2aa15de"),
    ("coronavirus/policy-responses/flattening-the-covid-19-peak-containment-and-mitigation-policies", "e96a4226"),
    ("coronavirus/policy-responses/food-supply-chains-and-covid-19-impacts-and-policy-lessons", "71b57aea"),
    ("coronavirus/policy-responses/foreign-direct-investment-flows-in-the-time-of-covid-19", "a2fa20c4"),
    ("coronavirus/policy-responses/from-containment-to-recovery-environmental-responses-to-the-covid-19-pandemic", "92c49c5c"),
    ("coronavirus/policy-responses/from-pandemic-to-recovery-local-employment-and-economic-development", "879d2913"),
    ("coronavirus/policy-responses/garantir-a-privacidade-de-dados-na-luta-contra-a-covid-19", "30f8c591"),
    ("coronavirus/policy-responses/garantizar-la-privacidad-de-datos-mientras-luchamos-contra-el-covid-19", "49dc1537"),
    ("coronavirus/policy-responses/gerer-les-migrations-internationales-dans-le-contexte-du-covid-19", "50199083"),
    ("coronavirus/policy-responses/getting-goods-across-borders-in-times-of-covid-19", "972ada7a"),
    ("coronavirus/policy-responses/global-financial-markets-policy-responses-to-covid-19", "2d98c7e0"),
    ("coronavirus/policy-responses/global-value-chains-efficiency-and-risks-in-the-context-of-covid-19", "67c75fdc"),
    ("coronavirus/policy-responses/government-financial-management-and-reporting-in-times-of-crisis", "3f87c7d8"),
    ("coronavirus/policy-responses/government-support-and-the-covid-19-pandemic", "cb8ca170"),
    ("coronavirus/policy-responses/greater-harmonisation-of-clinical-trial-regulations-would-help-the-fight-against-covid-19", "732e1c5c"),
    ("coronavirus/policy-responses/green-budgeting-and-tax-policy-tools-to-support-a-green-recovery", "bd02ea23"),
    ("coronavirus/policy-responses/guidance-on-the-transfer-pricing-implications-of-the-covid-19-pandemic", "731a59b0"),
    ("coronavirus/policy-responses/guide-sur-les-consequences-de-la-pandemie-de-covid-19-en-matiere-de-prix-de-transfert", "dba1f40e"),
    ("coronavirus/policy-responses/housing-amid-covid-19-policy-responses-and-challenges", "cfdc08a8"),
    ("coronavirus/policy-responses/how-best-to-communicate-on-migration-and-integration-in-the-context-of-covid-19", "813bddfb"),
    ("coronavirus/policy-responses/how-will-covid-19-reshape-science-technology-and-innovation", "2332334d"),
    ("coronavirus/policy-responses/impacto-territorial-de-la-covid-19-gestionar-la-crisis-en-todos-los-niveles-de-gobierno", "7d27f7d9"),
    ("coronavirus/policy-responses/implications-de-la-crise-du-coronavirus-pour-le-developpement-rural", "7bb4ae6d"),
    ("coronavirus/policy-responses/independent-fiscal-institutions-promoting-fiscal-transparency-and-accountability-during-the-coronavirus-covid-19-pandemic", "d853f8be"),
    ("coronavirus/policy-responses/initiative-de-l-ocde-pour-une-mobilite-internationale-sans-danger-pendant-la-pandemie-de-covid-19-comprenant-le-cadre", "712c2462"),
    ("coronavirus/policy-responses/innovation-development-and-covid-19-challenges-opportunities-and-ways-forward", "0c976158"),
    ("coronavirus/policy-responses/insolvency-and-debt-overhang-following-the-covid-19-outbreak-assessment-of-risks-and-policy-responses", "7806f078"),
    ("coronavirus/policy-responses/insurance-coverage-and-covid-19", "8d22a0a2"),
    ("coronavirus/policy-responses/integridad-publica-para-una-respuesta-y-recuperacion-efectivas-ante-el-covid-19", "c3d8f08f"),
    ("coronavirus/policy-responses/investment-in-the-mena-region-in-the-time-of-covid-19", "da23e4c9"),
    ("coronavirus/policy-responses/investment-promotion-agencies-in-the-time-of-covid-19", "50f79678"),
    ("coronavirus/policy-responses/investment-screening-in-times-of-covid-19-and-beyond", "aa60af47"),
    ("coronavirus/policy-responses/italian-regional-sme-policy-responses", "aa0eebbc"),
    ("coronavirus/policy-responses/job-retention-schemes-during-the-covid-19-lockdown-and-beyond", "0853ba1d"),
    ("coronavirus/policy-responses/keeping-the-internet-up-and-running-in-times-of-crisis", "4017c4c9"),
    ("coronavirus/policy-responses/l-acces-aux-vaccins-anti-covid-19-dans-un-monde-en-crise-etat-des-lieux-et-strategies", "fe64d679"),
    ("coronavirus/policy-responses/l-afrique-face-au-covid-19-implications-socio-economiques-regionales-et-priorites-politiques", "5b743bd8"),
    ("coronavirus/policy-responses/l-impact-territorial-du-covid-19-gerer-la-crise-entre-niveaux-de-gouvernement", "2596466b"),
    ("coronavirus/policy-responses/l-integrite-publique-au-service-d-une-reponse-et-d-un-relevement-efficaces-face-au-covid-19", "aaf16dd4"),
    ("coronavirus/policy-responses/l-investissement-dans-la-region-mena-a-l-heure-du-covid-19", "03cbddc6"),
    ("coronavirus/policy-responses/la-fonction-publique-face-a-la-pandemie-de-coronavirus-covid-19-premieres-actions-et-recommandations-initiales", "6f89770a"),
    ("coronavirus/policy-responses/le-commerce-electronique-au-temps-de-la-pandemie-de-covid-19", "b0b1ce3e"),
    ("coronavirus/policy-responses/le-conge-de-maladie-paye-pour-proteger-les-revenus-la-sante-et-les-emplois-pendant-la-crise-du-covid-19", "156ab874"),
    ("coronavirus/policy-responses/le-covid-19-et-le-secteur-de-l-aviation-impact-et-mesures-adoptees-par-les-pouvoirs-publics", "8948a9b1"),
    ("coronavirus/policy-responses/le-covid-19-et-le-secteur-du-commerce-de-detail-impact-et-mesures-de-politique-publique", "affc2e6b"),
    ("coronavirus/policy-responses/le-dynamisme-des-entreprises-pendant-la-pandemie-de-covid-19-quelles-politiques-pour-une-reprise-inclusive", "105f1e14"),
    ("coronavirus/policy-responses/learning-remotely-when-schools-close-how-well-are-students-and-schools-prepared-insights-from-pisa", "3bfda1f7"),
    ("coronavirus/policy-responses/legislative-budget-oversight-of-emergency-responses-experiences-during-the-coronavirus-covid-19-pandemic", "ba4f2ab5"),
    ("coronavirus/policy-responses/leitlinien-zu-den-verrechnungspreisfolgen-der-covid-19-pandemie", "752115f6"),
    ("coronavirus/policy-responses/les-actions-engagees-dans-le-domaine-du-tourisme-face-au-coronavirus-covid-19", "86db4328"),
    ("coronavirus/policy-responses/les-capacites-en-termes-de-teletravail-peuvent-entrainer-des-couts-de-confinement-differents-selon-les-territoires", "08920ecf"),
    ("coronavirus/policy-responses/les-dispositifs-de-maintien-dans-l-emploi-pendant-la-periode-de-confinement-de-la-crise-du-covid-19-et-au-dela", "d315c5f1"),
    ("coronavirus/policy-responses/les-mesures-adoptees-par-les-villes-face-au-covid-19", "aebdbf1c"),
    ("coronavirus/policy-responses/les-possibilites-de-l-apprentissage-en-ligne-pour-les-adultes-premiers-enseignements-de-la-crise-du-covid-19", "0ef7c9bf"),
    ("coronavirus/policy-responses/les-reponses-de-la-politique-de-la-concurrence-de-l-ocde-face-au-covid-19", "9348166d"),
    ("coronavirus/policy-responses/les-reponses-de-politiques-fiscale-et-budgetaire-a-la-crise-du-coronavirus-accroitre-la-confiance-et-la-resilience", "32128119"),
    ("coronavirus/policy-responses/leveraging-digital-trade-to-fight-the-consequences-of-covid-19", "f712f404"),
    ("coronavirus/policy-responses/lidando-com-os-riscos-de-seguranca-digital-durante-a-crise-da-covid-19", "f4087e7c"),
    ("coronavirus/policy-responses/lorsqu-un-virus-mondial-rencontre-des-realites-locales-coronavirus-covid-19-en-afrique-de-l-ouest", "16f49237"),
    ("coronavirus/policy-responses/maintenir-l-acces-a-l-internet-en-temps-de-crise", "3cd99153"),
    ("coronavirus/policy-responses/making-the-green-recovery-work-for-jobs-income-and-growth", "a505f3e7"),
    ("coronavirus/policy-responses/managing-for-sustainable-results-in-development-co-operation-in-uncertain-times", "c94f0b59"),
    ("coronavirus/policy-responses/managing-international-migration-under-covid-19", "6e914d57"),
    ("coronavirus/policy-responses/manteniendo-el-internet-en-marchaen-tiempos-de-crisis", "e5528cf8"),
    ("coronavirus/policy-responses/mehr-als-eindammung-antworten-der-oecd-gesundheitssysteme-auf-covid-19", "e446c943"),
    ("coronavirus/policy-responses/mettre-la-relance-verte-au-service-de-l-emploi-des-revenus-et-de-la-croissance", "899c5467"),
    ("coronavirus/policy-responses/mise-a-jour-des-orientations-sur-les-conventions-fiscales-et-impact-de-la-pandemie-de-covid-19", "4d797d39"),
    ("coronavirus/policy-responses/mit-dem-homeoffice-potenzial-konnen-auch-die-lockdown-kosten-verschiedener-standorte-variieren", "d181196c"),
    ("coronavirus/policy-responses/mobiliser-la-main-d-uvre-pendant-la-crise-du-covid-19-mesures-en-matiere-de-competences", "28032cdc"),
    ("coronavirus/policy-responses/no-policy-maker-is-an-island-the-international-regulatory-co-operation-response-to-the-covid-19-crisis", "3011ccd0"),
    ("coronavirus/policy-responses/o-combate-a-desinformacao-sobre-covid-19-em-plataformas-online", "7dc5c89d"),
    ("coronavirus/policy-responses/oecd-competition-policy-responses-to-covid-19", "5c47af5a"),
    ("coronavirus/policy-responses/oecd-initiative-for-safe-international-mobility-during-the-covid-19-pandemic-including-blueprint", "d0594162"),
    ("coronavirus/policy-responses/oecd-investment-policy-responses-to-covid-19", "4be0254d"),
    ("coronavirus/policy-responses/oecd-secretariat-analysis-of-tax-treaties-and-the-impact-of-the-covid-19-crisis", "947dcb01"),
    ("coronavirus/policy-responses/one-year-of-sme-and-entrepreneurship-policy-responses-to-covid-19-lessons-learned-to-build-back-better", "9a230220"),
    ("coronavirus/policy-responses/paid-sick-leave-to-protect-income-health-and-jobs-through-the-covid-19-crisis", "a9e1a154"),
    ("coronavirus/policy-responses/parceria-social-nos-tempos-da-pandemia-covid-19", "cf20df55"),
    ("coronavirus/policy-responses/peche-aquaculture-et-covid-19-enjeux-et-reponses-politiques", "f2c4b74d"),
    ("coronavirus/policy-responses/policy-implications-of-coronavirus-crisis-for-rural-development", "6b9d189a"),
    ("coronavirus/policy-responses/policy-measures-to-avoid-corruption-and-bribery-in-the-covid-19-response-and-recovery", "225abff3"),
    ("coronavirus/policy-responses/policy-responses-to-covid-19-in-the-seed-sector", "1e9291db"),
    ("coronavirus/policy-responses/politicas-de-reposta-das-cidades", "4a98f3a8"),
    ("coronavirus/policy-responses/por-que-a-ciencia-aberta-e-fundamental-no-combate-a-covid-19", "ca4bdcf9"),
    ("coronavirus/policy-responses/por-que-la-ciencia-abierta-es-esencial-para-combatir-el-covid-19", "f3b83813"),
    ("coronavirus/policy-responses/pour-soutenir-la-lutte-contre-le-covid-19-une-meilleure-harmonisation-des-reglementations-relatives-aux-essais-cliniques-s-impose", "dda56a39"),
    ("coronavirus/policy-responses/prestar-asesoramiento-cientifico-a-los-responsables-de-la-formulacion-de-politicas-durante-la-pandemia-de-covid-19", "181e448e"),
    ("coronavirus/policy-responses/productivity-gains-from-teleworking-in-the-post-covid-19-era-how-can-public-policies-make-it-happen", "a5d52e99"),
    ("coronavirus/policy-responses/proteccion-de-los-programas-de-beneficios-sociales-derivados-del-covid-19-contra-fraudes-y-errores", "6a535752"),
    ("coronavirus/policy-responses/protecting-online-consumers-during-the-covid-19-crisis", "2ce7353c"),
    ("coronavirus/policy-responses/providing-science-advice-to-policy-makers-during-covid-19", "4eec08c5"),
    ("coronavirus/policy-responses/public-employment-services-in-the-frontline-for-employees-jobseekers-and-employers", "c986ff92"),
    ("coronavirus/policy-responses/public-integrity-for-an-effective-covid-19-response-and-recovery", "a5c35d8c"),
    ("coronavirus/policy-responses/public-procurement-and-infrastructure-governance-initial-policy-responses-to-the-coronavirus-covid-19-crisis", "c0ab0a96"),
    ("coronavirus/policy-responses/public-servants-and-the-coronavirus-covid-19-pandemic-emerging-responses-and-initial-recommendations", "253b1277"),
    ("coronavirus/policy-responses/qu-ont-fait-les-plateformes-pour-proteger-les-travailleurs-pendant-la-crise-du-coronavirus-covid-19", "9cc1e75d"),
    ("coronavirus/policy-responses/rastreamento-e-monitoramento-da-covid-protecao-da-privacidade-e-dos-dados-pessoais-na-utilizacao-de-aplicativos-e-biometria", "78260de1"),
    ("coronavirus/policy-responses/rastreo-y-seguimiento-del-covid-19-proteccion-de-la-privacidad-y-los-datos-en-el-uso-de-aplicaciones-y-biometria", "af3cc887"),
    ("coronavirus/policy-responses/realizar-pruebas-para-la-deteccion-de-la-covid-19-una-forma-de-levantar-las-restricciones-de-confinamiento", "76e1c9d1"),
    ("coronavirus/policy-responses/rebuilding-tourism-for-the-future-covid-19-policy-responses-and-recovery", "bced9859"),
    ("coronavirus/policy-responses/rechtsetzungsqualitat-und-covid-19-risiken-bewaltigen-und-den-wiederaufbau-fordern", "a704d0ea"),
    ("coronavirus/policy-responses/reconstruir-mejor-por-una-recuperacion-resiliente-y-sostenible-despues-del-covid-19", "8ccb61b8"),
    ("coronavirus/policy-responses/reconstruire-en-mieux-pour-une-reprise-durable-et-resiliente-apres-le-covid-19", "583cf0b8"),
    ("coronavirus/policy-responses/reconstruire-le-tourisme-de-demain-reponses-des-pouvoirs-publics-au-covid-19-et-reprise", "56639ffa"),
    ("coronavirus/policy-responses/regulatory-policy-and-covid-19-behavioural-insights-for-fast-paced-decision-making", "7a521805"),
    ("coronavirus/policy-responses/regulatory-quality-and-covid-19-managing-the-risks-and-supporting-the-recovery", "3f752e60"),
    ("coronavirus/policy-responses/regulatory-quality-and-covid-19-the-use-of-regulatory-management-tools-in-a-time-of-crisis", "b876d5dc"),
    ("coronavirus/policy-responses/removing-administrative-barriers-improving-regulatory-delivery", "6704c8a1"),
    ("coronavirus/policy-responses/renforcer-la-premiere-ligne-comment-les-soins-primaires-aident-les-systemes-de-sante-a-s-adapter-a-la-pandemie-de-covid-19", "ae139cf5"),
    ("coronavirus/policy-responses/reponse-a-la-crise-du-covid-19-dans-les-pays-de-la-region-mena", "082e24c2"),
    ("coronavirus/policy-responses/reponses-de-l-administration-fiscale-au-covid-19-considerations-liees-a-la-continuite-de-l-activite", "ef1e8f04"),
    ("coronavirus/policy-responses/reponses-de-l-administration-fiscale-au-covid-19-mesures-prises-pour-soutenir-les-contribuables", "69d26e77"),
    ("coronavirus/policy-responses/reponses-de-l-administration-fiscale-face-au-covid-19-planifier-la-phase-de-reprise", "fe863859"),
    ("coronavirus/policy-responses/responding-to-the-covid-19-and-pandemic-protection-gap-in-insurance", "35e74736"),
    ("coronavirus/policy-responses/response-recovery-and-prevention-in-the-coronavirus-covid-19-pandemic-in-developing-countries-women-and-girls-on-the-frontlines", "23d645da"),
    ("coronavirus/policy-responses/respostas-da-administracao-tributaria-a-covid-19-consideracoes-sobre-a-continuidade-dos-servicos", "7ffd3180"),
    ("coronavirus/policy-responses/respuesta-de-las-administraciones-tributarias-al-covid-19-consideraciones-acerca-de-la-continuidad-de-actividades-y-servicios", "1faead46"),
    ("coronavirus/policy-responses/respuestas-educativas-a-covid-19-adoptar-el-aprendizaje-digital-y-la-colaboracion-en-linea", "e6907480"),
    ("coronavirus/policy-responses/respuestas-ocde-de-politica-de-competencia-ante-la-crisis-de-covid-19", "d99c6f1f"),
    ("coronavirus/policy-responses/respuestas-politicas-de-las-ciudades-al-covid-19", "12646989"),
    ("coronavirus/policy-responses/retirement-savings-in-the-time-of-covid-19", "b9740518"),
    ("coronavirus/policy-responses/risiken-fur-den-unternehmenssektor-in-der-covid-19-krise-beurteilung-und-politikreaktionen", "5776b9e1"),
    ("coronavirus/policy-responses/risks-that-matter-2020-the-long-reach-of-covid-19", "44932654"),
    ("coronavirus/policy-responses/risques-lies-a-la-securite-numerique-pendant-la-crise-du-coronavirus-covid-19", "ba8e6d3a"),
    ("coronavirus/policy-responses/safeguarding-covid-19-social-benefit-programmes-from-fraud-and-error", "4e21c80e"),
    ("coronavirus/policy-responses/salud-ambiental-y-resiliencia-ante-las-pandemias", "3788e625"),
    ("coronavirus/policy-responses/sante-environnementale-et-renforcement-de-la-resilience-face-aux-pandemies", "25111ac9"),
    ("coronavirus/policy-responses/saude-ambiental-e-fortalecendo-a-resiliencia-a-pandemias", "54eb1a65"),
    ("coronavirus/policy-responses/scaling-up-policies-that-connect-people-with-jobs-in-the-recovery-from-covid-19", "a91d2087"),
    ("coronavirus/policy-responses/science-technologie-et-innovation-la-coordination-nationale-au-service-de-la-lutte-mondiale-contre-le-covid-19", "b18ecb4a"),
    ("coronavirus/policy-responses/science-technology-and-innovation-how-co-ordination-at-home-can-help-the-global-fight-against-covid-19", "aa547c11"),
    ("coronavirus/policy-responses/securing-the-recovery-ambition-and-resilience-for-the-well-being-of-children-in-the-post-covid-19-decade", "0f02237a"),
    ("coronavirus/policy-responses/servicios-publicos-de-empleo-en-primera-linea-para-solicitantes-de-empleo-trabajadores-y-empleadores", "7a921e6c"),
    ("coronavirus/policy-responses/servidores-publicos-e-a-pandemia-de-coronavirus-covid-19-respostas-emergentes-e-recomendacoes-iniciais", "9f2bd471"),
    ("coronavirus/policy-responses/seven-lessons-learned-about-digital-security-during-the-covid-19-crisis", "e55a6b9a"),
    ("coronavirus/policy-responses/shock-cultura-covid-19-e-settori-culturali-e-creativi", "e9ef83e6"),
    ("coronavirus/policy-responses/siete-lecciones-aprendidas-sobre-seguridad-digital-durante-la-crisis-de-covid-19", "c8fa9059"),
    ("coronavirus/policy-responses/skill-measures-to-mobilise-the-workforce-during-the-covid-19-crisis", "afd33a65"),
    ("coronavirus/policy-responses/social-economy-and-the-covid-19-crisis-current-and-future-roles", "f904b89f"),
    ("coronavirus/policy-responses/soutenir-l-emploi-et-les-entreprises-une-des-cles-de-la-reprise", "4cb4c30c"),
    ("coronavirus/policy-responses/start-ups-in-the-time-of-covid-19-facing-the-challenges-seizing-the-opportunities", "87219267"),
    ("coronavirus/policy-responses/stocktaking-report-on-immediate-public-procurement-and-infrastructure-responses-to-covid-19", "248d0646"),
    ("coronavirus/policy-responses/strategic-foresight-for-the-covid-19-crisis-and-beyond-using-futures-thinking-to-design-better-public-policies", "c3448fa5"),
    ("coronavirus/policy-responses/strengthening-health-systems-during-a-pandemic-the-role-of-development-finance", "f762bf1c"),
    ("coronavirus/policy-responses/strengthening-online-learning-when-schools-are-closed-the-role-of-families-and-teachers-in-supporting-students-during-the-covid-19-crisis", "c4ecba6c"),
    ("coronavirus/policy-responses/strengthening-the-frontline-how-primary-health-care-helps-health-systems-adapt-during-the-covid-19-pandemic", "9a5ae6da"),
    ("coronavirus/policy-responses/suivi-et-tracage-du-covid-19-proteger-la-vie-privee-et-les-donnees-lors-de-l-utilisation-d-applications-et-de-la-biometrie", "40a928d1"),
    ("coronavirus/policy-responses/supporting-businesses-in-financial-distress-to-avoid-insolvency-during-the-covid-19-crisis", "b4154a8b"),
    ("coronavirus/policy-responses/supporting-jobs-and-companies-a-bridge-to-the-recovery-phase", "08962553"),
    ("coronavirus/policy-responses/supporting-livelihoods-during-the-covid-19-crisis-closing-the-gaps-in-safety-nets", "17cbb92d"),
    ("coronavirus/policy-responses/supporting-people-and-companies-to-deal-with-the-covid-19-virus-options-for-an-immediate-employment-and-social-policy-response", "d33dffe6"),
    ("coronavirus/policy-responses/supporting-young-people-s-mental-health-through-the-covid-19-crisis", "84e143e5"),
    ("coronavirus/policy-responses/tackling-the-mental-health-impact-of-the-covid-19-crisis-an-integrated-whole-of-society-response", "0ccafa0b"),
    ("coronavirus/policy-responses/tax-administration-digital-resilience-in-the-covid-19-environment", "2f3cf2fb"),
    ("coronavirus/policy-responses/tax-administration-privacy-disclosure-and-fraud-risks-related-to-covid-19", "950d8ed2"),
    ("coronavirus/policy-responses/tax-administration-responses-to-covid-19-assisting-wider-government", "0dc51664"),
    ("coronavirus/policy-responses/tax-administration-responses-to-covid-19-business-continuity-considerations", "953338dc"),
    ("coronavirus/policy-responses/tax-administration-responses-to-covid-19-measures-taken-to-support-taxpayers", "adc84188"),
    ("coronavirus/policy-responses/tax-administration-responses-to-covid-19-recovery-period-planning", "0ab5481d"),
    ("coronavirus/policy-responses/tax-and-fiscal-policy-in-response-to-the-coronavirus-crisis-strengthening-confidence-and-resilience", "60f640a8"),
    ("coronavirus/policy-responses/teaching-and-learning-in-vet-providing-effective-practical-training-in-school-based-settings", "64f5f843"),
    ("coronavirus/policy-responses/testando-para-a-covid-19-uma-maneira-de-flexibilizar-as-restricoes-do-confinamento", "d8bbac2f"),
    ("coronavirus/policy-responses/testing-for-covid-19-a-way-to-lift-confinement-restrictions", "89756248"),
    ("coronavirus/policy-responses/testing-for-covid-19-how-to-best-use-the-various-tests", "c76df201"),
    ("coronavirus/policy-responses/the-covid-19-crisis-a-catalyst-for-government-transformation", "1d0c0788"),
    ("coronavirus/policy-responses/the-covid-19-crisis-and-state-ownership-in-the-economy-issues-and-policy-considerations", "ce417c46"),
    ("coronavirus/policy-responses/the-effect-of-covid-19-on-alcohol-consumption-and-policy-responses-to-prevent-harmful-alcohol-consumption", "53890024"),
    ("coronavirus/policy-responses/the-face-mask-global-value-chain-in-the-covid-19-outbreak-evidence-and-policy-lessons", "a4df866d"),
    ("coronavirus/policy-responses/the-impact-of-coronavirus-covid-19-and-the-global-oil-price-shock-on-the-fiscal-position-of-oil-exporting-developing-countries", "8bafbd95"),
    ("coronavirus/policy-responses/the-impact-of-coronavirus-covid-19-on-forcibly-displaced-persons-in-developing-countries", "88ad26de"),
    ("coronavirus/policy-responses/the-impact-of-covid-19-on-agricultural-markets-and-ghg-emissions", "57e5eb53"),
    ("coronavirus/policy-responses/the-impact-of-covid-19-on-student-equity-and-inclusion-supporting-vulnerable-students-during-school-closures-and-school-re-openings", "d593b5c8"),
    ("coronavirus/policy-responses/the-impact-of-the-coronavirus-covid-19-crisis-on-development-finance", "9de00b3b"),
    ("coronavirus/policy-responses/the-impacts-of-covid-19-on-the-space-industry", "e727e36f"),
    ("coronavirus/policy-responses/the-long-term-environmental-implications-of-covid-19", "4b7a9937"),
    ("coronavirus/policy-responses/the-oecd-green-recovery-database", "47ae0f0d"),
    ("coronavirus/policy-responses/the-potential-of-online-learning-for-adults-early-lessons-from-the-covid-19-crisis", "ee040002"),
    ("coronavirus/policy-responses/the-role-of-online-platforms-in-weathering-the-covid-19-shock", "2a3b8434"),
    ("coronavirus/policy-responses/the-role-of-transparency-in-avoiding-a-covid-19-induced-food-crisis", "d6a37aeb"),
    ("coronavirus/policy-responses/the-territorial-impact-of-covid-19-managing-the-crisis-across-levels-of-government", "d3e314e1"),
    ("coronavirus/policy-responses/the-territorial-impact-of-covid-19-managing-the-crisis-and-recovery-across-levels-of-government", "a2c6abaf"),
    ("coronavirus/policy-responses/tourism-policy-responses-to-the-coronavirus-covid-19", "6466aa20"),
    ("coronavirus/policy-responses/towards-gender-inclusive-recovery", "ab597807"),
    ("coronavirus/policy-responses/tracking-and-tracing-covid-protecting-privacy-and-data-while-using-apps-and-biometrics", "8f394636"),
    ("coronavirus/policy-responses/trade-facilitation-and-the-covid-19-pandemic", "094306d2"),
    ("coronavirus/policy-responses/trade-finance-in-the-covid-era-current-and-future-challenges", "79daca94"),
    ("coronavirus/policy-responses/trade-finance-in-times-of-crisis-responses-from-export-credit-agencies", "946a21db"),
    ("coronavirus/policy-responses/trade-interdependencies-in-covid-19-goods", "79aaa1d6"),
    ("coronavirus/policy-responses/transparence-communication-et-confiance-le-role-de-la-communication-publique-pour-combattre-la-vague-de-desinformation-concernant-le-nouveau-coronavirus", "1d566531"),
    ("coronavirus/policy-responses/transparency-communication-and-trust-the-role-of-public-communication-in-responding-to-the-wave-of-disinformation-about-the-new-coronavirus", "bef7ad6e"),
    ("coronavirus/policy-responses/treatments-and-a-vaccine-for-covid-19-the-need-for-coordinating-policies-on-r-d-manufacturing-and-access", "6e7669a9"),
    ("coronavirus/policy-responses/updated-guidance-on-tax-treaties-and-the-impact-of-the-covid-19-pandemic", "df42be07"),
    ("coronavirus/policy-responses/usando-a-inteligencia-artificial-para-ajudar-no-combate-a-covid-19", "a569dd72"),
    ("coronavirus/policy-responses/usar-el-comercio-para-combatir-la-covid-19-produccion-y-distribucion-de-vacunas", "59660b60"),
    ("coronavirus/policy-responses/using-artificial-intelligence-to-help-combat-covid-19", "ae4c5c21"),
    ("coronavirus/policy-responses/using-trade-to-fight-covid-19-manufacturing-and-distributing-vaccines", "dc0d37fc"),
    ("coronavirus/policy-responses/uso-de-la-inteligencia-artificial-para-luchar-contra-la-pandemia-del-covid-19", "8c381c4e"),
    ("coronavirus/policy-responses/utiliser-l-intelligence-artificielle-au-service-de-la-lutte-contre-le-covid-19", "0ef5d4f9"),
    ("coronavirus/policy-responses/vet-in-a-time-of-crisis-building-foundations-for-resilient-vocational-education-and-training-systems", "efff194c"),
    ("coronavirus/policy-responses/walking-the-tightrope-avoiding-a-lockdown-while-containing-the-virus", "1b912d4a"),
    ("coronavirus/policy-responses/what-have-countries-done-to-support-young-people-in-the-covid-19-crisis", "ac9f056c"),
    ("coronavirus/policy-responses/what-have-platforms-done-to-protect-workers-during-the-coronavirus-covid-19-crisis", "9d1c7aa2"),
    ("coronavirus/policy-responses/what-is-the-impact-of-the-covid-19-pandemic-on-immigrants-and-their-children", "e7cbb7de"),
    ("coronavirus/policy-responses/when-a-global-virus-meets-local-realities-coronavirus-covid-19-in-west-africa", "8af7f692"),
    ("coronavirus/policy-responses/when-the-going-gets-tough-the-tough-get-going-how-economic-regulators-bolster-the-resilience-of-network-industries-in-response-to-the-covid-19-crisis", "cd8915b1"),
    ("coronavirus/policy-responses/why-open-science-is-critical-to-combatting-covid-19", "cd6ab2f9"),
    ("coronavirus/policy-responses/women-at-the-core-of-the-fight-against-covid-19-crisis", "553a8269"),
    ("coronavirus/policy-responses/workforce-and-safety-in-long-term-care-during-the-covid-19-pandemic", "43fc5d50"),
    ("coronavirus/policy-responses/youth-and-covid-19-response-recovery-and-resilience", "c40e61c6"),
];
